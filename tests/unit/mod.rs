mod error_handling_test;
mod study_log_decoding_test;
