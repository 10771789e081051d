mod expressions_tests;
mod flwor_tests;
mod paths_tests;
mod primaries_tests;
mod prolog_tests;
mod trivia_tests;
mod types_tests;
