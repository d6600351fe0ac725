mod pruning;
