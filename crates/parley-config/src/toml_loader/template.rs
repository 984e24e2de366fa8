//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Parley Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[endpoint]
# base_url = "http://127.0.0.1:8000"

[exchange]
# path = "/adstod/start"
# message_field = "message"
# session_field = "thread_id"     # some backends use "sessionId"
# reply_fields = ["message", "content"]
# shape = "reply"                 # reply, transcript
# transcript_field = "messages"

[session]
# storage_key = "thread_id"
# store = "file"                  # file, memory
# store_path = "/path/to/session.json"

[upload]
# path = "/minnisblad-adstod/upload/"
# file_field = "file"
# categories_field = "chapters"
# output_dir = "."
# fallback_filename = "document.docx"

[logging]
# level = "info"                  # trace, debug, info, warn, error
"##
    .to_string()
}
