mod add;
mod greet;
