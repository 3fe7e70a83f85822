mod reinitialize_fails;
