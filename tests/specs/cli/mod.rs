mod check;
mod help;
mod view;
