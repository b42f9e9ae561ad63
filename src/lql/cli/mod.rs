pub mod commands;
mod prompt;
mod render;
mod setup;
mod styles;
