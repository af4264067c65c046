
mod metadata_tests;
mod shortnumber_tests;
