mod header;
mod query;
mod question;
mod reply;
mod request_message;
mod resource_record;
mod response_message;
mod utils;

pub use query::InboundQuery;
pub use reply::ReplyMessage;
pub use response_message::ResponseMessage;

/// Encode a standard A query for `domain`, for sending to an upstream server.
pub fn encode_request(domain: &str) -> std::io::Result<Vec<u8>> {
    let request_msg = request_message::RequestMessage::new(domain);
    let mut request_bytes: Vec<u8> = vec![];
    request_msg.to_bytes(&mut request_bytes)?;

    Ok(request_bytes)
}

/// Decode an upstream server's response.
pub fn decode_response(response_bytes: &[u8]) -> std::io::Result<ResponseMessage> {
    ResponseMessage::parse_response(response_bytes)
}
