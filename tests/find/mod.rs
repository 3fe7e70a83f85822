mod find_prints_matching_commit_ids;
