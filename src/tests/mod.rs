mod world_tests;
