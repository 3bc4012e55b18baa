mod handler_load;
