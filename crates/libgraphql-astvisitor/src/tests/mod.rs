mod report_tests;
