mod jobs_port_tests;
mod providers;
