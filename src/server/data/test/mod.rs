mod character;
mod favourite;
mod user;
