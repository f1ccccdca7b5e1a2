///
/// Publisher confirm received from the broker.
///
#[derive(Debug)]
pub struct Confirm {
    pub delivery_tag: u64,
    pub multiple: bool,
    pub variant: ConfirmVariant,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfirmVariant {
    Ack,
    Nack,
}

impl Confirm {
    ///
    /// Whether this confirm settles the given delivery tag.
    /// `multiple` confirms settle every tag up to and including their own.
    ///
    pub fn settles(&self, delivery_tag: u64) -> bool {
        self.delivery_tag == delivery_tag || (self.multiple && self.delivery_tag > delivery_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_confirm_settles_only_its_own_tag() {
        let confirm = Confirm {
            delivery_tag: 2,
            multiple: false,
            variant: ConfirmVariant::Ack,
        };

        assert!(confirm.settles(2));
        assert!(!confirm.settles(1));
        assert!(!confirm.settles(3));
    }

    #[test]
    fn multiple_confirm_settles_tags_up_to_its_own() {
        let confirm = Confirm {
            delivery_tag: 5,
            multiple: true,
            variant: ConfirmVariant::Ack,
        };

        assert!(confirm.settles(1));
        assert!(confirm.settles(5));
        assert!(!confirm.settles(6));
    }
}
