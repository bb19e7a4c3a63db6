mod kv_entries;
