mod fixtures;
mod replay_tests;
