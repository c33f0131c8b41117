use borsh::{BorshDeserialize, BorshSerialize};

/// Size of the serialised [`GreetingAccount`].
///
/// This is the space allocated for the greeted account when it’s created.
pub const GREETING_SIZE: usize = core::mem::size_of::<u32>();


/// Data stored by the hello world program in the greeted account.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize,
)]
pub struct GreetingAccount {
    /// Number of times the account has been greeted.
    pub counter: u32,
}

impl GreetingAccount {
    /// Decodes the record from account data.
    ///
    /// Any bytes past [`GREETING_SIZE`] are ignored.
    pub fn decode(data: &[u8]) -> borsh::io::Result<Self> {
        Self::deserialize(&mut &data[..])
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_size() {
        let data = borsh::to_vec(&GreetingAccount::default()).unwrap();
        assert_eq!(GREETING_SIZE, data.len());
    }

    #[test]
    fn test_decode() {
        let check = |want: u32, data: &[u8]| {
            let got = GreetingAccount::decode(data).unwrap();
            assert_eq!(GreetingAccount { counter: want }, got);
        };
        check(0, &[0, 0, 0, 0]);
        check(1, &[1, 0, 0, 0]);
        check(0x0403_0201, &[1, 2, 3, 4]);
        check(42, &[42, 0, 0, 0, 0xff, 0xff]);
    }

    #[test]
    fn test_decode_short() {
        assert!(GreetingAccount::decode(&[]).is_err());
        assert!(GreetingAccount::decode(&[1, 0, 0]).is_err());
    }

    #[test]
    fn test_encoding_is_little_endian() {
        let data = borsh::to_vec(&GreetingAccount { counter: 258 }).unwrap();
        assert_eq!(vec![2, 1, 0, 0], data);
    }
}
