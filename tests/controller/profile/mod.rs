mod access;
mod update;
