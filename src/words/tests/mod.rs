mod stopword_tests;
