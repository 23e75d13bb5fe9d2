//! Outbound effects produced by handlers.
//!
//! Handlers never write to sockets. They fill an `Outbox` with
//! (target session, line) pairs while holding the directory lock, and the
//! worker hands it to [`Matrix::deliver`](super::Matrix::deliver) after the
//! lock is released.

use super::uid::SessionId;
use relay_proto::Message;
use std::sync::Arc;

/// One line addressed to one session.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub to: SessionId,
    pub message: Arc<Message>,
}

/// Ordered list of deliveries.
#[derive(Debug, Default)]
pub struct Outbox {
    deliveries: Vec<Delivery>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, to: SessionId, message: Message) {
        self.deliveries.push(Delivery {
            to,
            message: Arc::new(message),
        });
    }

    /// Address the same message to several sessions.
    pub fn broadcast<I>(&mut self, targets: I, message: Message)
    where
        I: IntoIterator<Item = SessionId>,
    {
        let message = Arc::new(message);
        self.deliveries.extend(targets.into_iter().map(|to| Delivery {
            to,
            message: Arc::clone(&message),
        }));
    }

    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Delivery> {
        self.deliveries.iter()
    }

    /// Rendered lines addressed to `id`, in order.
    #[cfg(test)]
    pub fn lines_for(&self, id: SessionId) -> Vec<String> {
        self.deliveries
            .iter()
            .filter(|d| d.to == id)
            .map(|d| d.message.to_string())
            .collect()
    }
}

impl IntoIterator for Outbox {
    type Item = Delivery;
    type IntoIter = std::vec::IntoIter<Delivery>;

    fn into_iter(self) -> Self::IntoIter {
        self.deliveries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_shares_one_message() {
        let (a, b) = (SessionId::new(1), SessionId::new(2));
        let mut outbox = Outbox::new();
        outbox.broadcast([a, b], Message::privmsg("#x", "hi"));
        outbox.push(a, Message::privmsg("a", "only a"));

        assert_eq!(outbox.len(), 3);
        let all: Vec<&Delivery> = outbox.iter().collect();
        assert!(Arc::ptr_eq(&all[0].message, &all[1].message));
        assert_eq!(
            outbox.lines_for(a),
            vec!["PRIVMSG #x :hi", "PRIVMSG a :only a"]
        );
        assert_eq!(outbox.lines_for(b), vec!["PRIVMSG #x :hi"]);
    }
}
