mod property_buf;
