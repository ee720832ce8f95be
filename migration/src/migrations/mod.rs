pub mod m202510170001_create_feedbacks;
