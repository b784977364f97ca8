use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use wordlist::WordIndex;

// RFC 1035 caps DNS-over-UDP messages at 512 bytes.
const MAX_REQUEST_SIZE: usize = 512;

/// Bind the socket and answer queries until the process dies. Each datagram
/// gets its own task; the tasks share nothing but the read-only word index
/// and the socket they reply on.
pub async fn run(bind_addr: SocketAddr, index: Arc<WordIndex>) -> std::io::Result<()> {
    let socket = Arc::new(UdpSocket::bind(bind_addr).await?);
    tracing::info!("listening on {}, pid: {}", bind_addr, std::process::id());

    loop {
        let mut buf = [0u8; MAX_REQUEST_SIZE];
        let (read_len, remote_addr) = socket.recv_from(&mut buf).await?;

        let request = buf[..read_len].to_vec();
        let socket = socket.clone();
        let index = index.clone();

        tokio::spawn(async move {
            if let Some(reply) = answer(&request, &index) {
                if let Err(e) = socket.send_to(&reply, remote_addr).await {
                    tracing::warn!("failed to send reply to {}: {}", remote_addr, e);
                }
            }
        });
    }
}

/// Decode one request and build the reply bytes. `None` means the request is
/// dropped without an answer: malformed packets, messages with more than one
/// question, and names with a word missing from the index all get silence
/// rather than an error response.
fn answer(request: &[u8], index: &WordIndex) -> Option<Vec<u8>> {
    let query = match dns::InboundQuery::parse(request) {
        Ok(q) => q,
        Err(e) => {
            tracing::warn!("dropping request: {}", e);
            return None;
        }
    };

    tracing::debug!(
        "transaction id: {:#06x}, flags: {:#06x}, questions: {}, name: {}",
        query.header().id(),
        query.header().flags(),
        query.header().qd_count(),
        query.name(),
    );

    let addr = match tripleword::name_to_addr(query.labels(), index) {
        Some(addr) => addr,
        None => {
            tracing::warn!("not all words of '{}' are in the wordlist", query.name());
            return None;
        }
    };

    let octets = addr.to_be_bytes();
    tracing::info!(
        "responding with {}.{}.{}.{} for {}",
        octets[0],
        octets[1],
        octets[2],
        octets[3],
        query.name(),
    );

    let reply = dns::ReplyMessage::new(&query, addr);
    let mut reply_bytes: Vec<u8> = vec![];
    if let Err(e) = reply.to_bytes(&mut reply_bytes) {
        tracing::warn!("failed to encode reply: {}", e);
        return None;
    }

    Some(reply_bytes)
}
