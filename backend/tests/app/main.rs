mod helpers;

mod config;
mod cors;
mod uploads;
