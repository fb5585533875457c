pub mod health;
// layercake:modules
