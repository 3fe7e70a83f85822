mod add_missing_file_fails;
mod add_unmodified_file_is_a_no_op;
mod stage_new_file;
