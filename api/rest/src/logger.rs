pub fn logger_format() -> &'static str {
    "[ApiRestServer] %a \"%r\" %s %b %Dms"
}
