mod dispatch;
mod queries;
