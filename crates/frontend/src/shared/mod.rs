pub mod virtual_window;
