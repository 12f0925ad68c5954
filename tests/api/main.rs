// fn main not required
mod health_check;
mod helpers;
mod home;
