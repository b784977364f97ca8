use std::io;

// Readable dotted name from a wire-format one.
pub fn qname_to_domain(qname: &[u8]) -> String {
    let mut labels = Vec::new();

    let mut index = 0;
    while index < qname.len() {
        let label_len: usize = qname[index] as usize;

        if label_len == 0 {
            break;
        }

        let label_begin_index = index + 1;
        let next_index = label_begin_index + label_len;

        let label_bytes = &qname[label_begin_index..next_index.min(qname.len())];

        let label = String::from_utf8_lossy(label_bytes).to_string();
        labels.push(label);

        index = next_index
    }

    labels.join(".")
}

// Dotted name to wire format: length-prefixed labels, zero terminated.
pub fn domain_to_qname(domain: &str) -> Vec<u8> {
    let mut qname: Vec<u8> = Vec::new();

    let labels: Vec<&str> = domain.split('.').collect();
    for label in labels {
        qname.push(label.len() as u8);

        for c in label.as_bytes() {
            qname.push(*c);
        }
    }

    qname.push(0);

    qname
}

// Same wire format, built from already-split labels.
pub fn labels_to_qname(labels: &[String]) -> Vec<u8> {
    let mut qname: Vec<u8> = Vec::with_capacity(256);

    for label in labels {
        qname.push(label.len() as u8);
        qname.extend_from_slice(label.as_bytes());
    }

    qname.push(0);

    qname
}

/// Parse the length-prefixed labels of a question name. A zero length byte or
/// the end of the buffer stops the walk; a length byte running past the end
/// of the buffer is an error. Returns the labels and the bytes consumed.
pub fn parse_labels(data: &[u8]) -> io::Result<(Vec<String>, usize)> {
    let mut labels = Vec::new();
    let mut index = 0;

    while index < data.len() {
        let label_len = data[index] as usize;

        if label_len == 0 {
            index += 1;
            break;
        }

        let label_begin_index = index + 1;
        let next_index = label_begin_index + label_len;

        if next_index > data.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "label length runs past the end of the packet",
            ));
        }

        let label = String::from_utf8_lossy(&data[label_begin_index..next_index]).to_string();
        labels.push(label);

        index = next_index;
    }

    Ok((labels, index))
}
