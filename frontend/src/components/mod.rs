pub mod request_form;
