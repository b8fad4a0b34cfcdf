#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    MessageChanged { label: String, message: String },
    ErrorMessageChanged { label: String, message: String },
    MessageCleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    message: Option<String>,
}

impl StatusBar {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_message(&mut self, label: String, message: String) {
        let normalized_message = message.replace('\n', " ");
        self.message = Some(format!("[{label}] {normalized_message}"));
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::MessageChanged { label, message } => self.set_message(label, message),
            Message::ErrorMessageChanged { label, message } => {
                self.set_message(format!("ERR: {label}"), message)
            }
            Message::MessageCleared => {
                self.message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_message_none_by_default() {
        assert_eq!(StatusBar::default().message(), None);
    }

    #[test]
    fn test_update_message_changed() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::MessageChanged {
            label: "Open".to_string(),
            message: "/product-detail/7".to_string(),
        });
        assert_eq!(status_bar.message(), Some("[Open] /product-detail/7"));
    }

    #[test]
    fn test_update_error_message_changed() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::ErrorMessageChanged {
            label: "Catalog".to_string(),
            message: "expected value at line 1".to_string(),
        });
        assert_eq!(
            status_bar.message(),
            Some("[ERR: Catalog] expected value at line 1")
        );
    }

    #[test]
    fn test_update_message_cleared() {
        let mut status_bar = StatusBar {
            message: Some("[Info] Test message".to_string()),
        };
        status_bar.update(Message::MessageCleared);
        assert_eq!(status_bar, StatusBar { message: None });
    }

    #[test]
    fn test_newline_normalization() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::MessageChanged {
            label: "MultiLine".to_string(),
            message: "Line 1\nLine 2\nLine 3".to_string(),
        });
        assert_eq!(status_bar.message(), Some("[MultiLine] Line 1 Line 2 Line 3"));
    }

    #[test]
    fn test_message_overwrite() {
        let mut status_bar = StatusBar::default();
        for label in ["First", "Second"] {
            status_bar.update(Message::MessageChanged {
                label: label.to_string(),
                message: format!("{label} message"),
            });
        }
        assert_eq!(status_bar.message(), Some("[Second] Second message"));
    }
}
