mod document_import_tests;
