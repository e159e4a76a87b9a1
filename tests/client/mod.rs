mod transcribe_cli_test;
