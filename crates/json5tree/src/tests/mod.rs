mod comments;
mod parse_bad;
