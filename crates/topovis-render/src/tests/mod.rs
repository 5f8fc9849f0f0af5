mod path;
mod terminal;
