pub mod common;

pub mod err;

pub mod reviews;

pub mod contact;

pub mod portfolio;

pub mod health;
