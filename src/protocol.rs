//! Wire format for the infrared daemon's line protocol

/// Build the one-line `SEND_ONCE` request for a key press.
///
/// Exactly `SEND_ONCE <remote> <key>\r\n`, one request per connection; the
/// daemon's reply is never read.
pub fn send_once_request(remote: &str, key: &str) -> Vec<u8> {
    format!("SEND_ONCE {} {}\r\n", remote, key).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_once_exact_bytes() {
        let request = send_once_request("samsung", "KEY_POWER");
        assert_eq!(request, b"SEND_ONCE samsung KEY_POWER\r\n");
    }
}
