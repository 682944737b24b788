mod auth;
mod chat;
mod community;
mod games;
mod icons;
mod marketplace;
mod nav;
mod shell;

pub use shell::Shell;
