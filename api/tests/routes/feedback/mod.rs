mod delete_test;
mod generate_test;
mod post_test;
