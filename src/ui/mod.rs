pub mod gallery_controller;
pub mod gallery_view;
pub mod viewer;
