mod common;
mod intake;
mod scenario;
mod service;
