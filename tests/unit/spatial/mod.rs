mod coordinate;
