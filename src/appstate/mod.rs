pub mod appstate;
