mod edit_log;
