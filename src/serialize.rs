//! Serde support. Every container is written as a sequence of its values in iteration order.
//! Ordered containers are deserialized with the natural order of their keys.

use crate::linked_list::LinkedList;
use crate::red_black_tree::{RedBlackMultiSet, RedBlackSet};
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

struct SeqVisitor<S, T> {
    expecting: &'static str,
    marker: PhantomData<fn() -> (S, T)>,
}

impl<S, T> SeqVisitor<S, T> {
    fn new(expecting: &'static str) -> Self {
        SeqVisitor {
            expecting,
            marker: PhantomData,
        }
    }
}

impl<'de, S, T> Visitor<'de> for SeqVisitor<S, T>
where
    S: Default + Extend<T>,
    T: Deserialize<'de>,
{
    type Value = S;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut container = S::default();
        while let Some(value) = access.next_element()? {
            container.extend(Some(value));
        }
        Ok(container)
    }
}

fn serialize_values<'a, S, T, I>(serializer: S, len: usize, values: I) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seq = serializer.serialize_seq(Some(len))?;
    for value in values {
        seq.serialize_element(value)?;
    }
    seq.end()
}

impl<T, C> Serialize for RedBlackSet<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_values(serializer, self.len(), self)
    }
}

impl<'de, T> Deserialize<'de> for RedBlackSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor::new("a sequence of set keys"))
    }
}

impl<T, C> Serialize for RedBlackMultiSet<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_values(serializer, self.len(), self)
    }
}

impl<'de, T> Deserialize<'de> for RedBlackMultiSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor::new("a sequence of multiset keys"))
    }
}

impl<T> Serialize for LinkedList<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_values(serializer, self.len(), self)
    }
}

impl<'de, T> Deserialize<'de> for LinkedList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor::new("a sequence of list values"))
    }
}

#[cfg(test)]
mod tests {
    use crate::linked_list::LinkedList;
    use crate::red_black_tree::{RedBlackMultiSet, RedBlackSet};
    use serde_test::{assert_de_tokens, assert_ser_tokens, assert_tokens, Token};

    #[test]
    fn test_set_tokens() {
        let set: RedBlackSet<i32> = vec![3, 1, 2].into_iter().collect();
        assert_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::I32(1),
                Token::I32(2),
                Token::I32(3),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_set_drops_duplicate_keys() {
        let set: RedBlackSet<i32> = vec![1, 2].into_iter().collect();
        assert_de_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::I32(2),
                Token::I32(1),
                Token::I32(2),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_set_with_reverse_order_serializes_in_iteration_order() {
        use compare::{natural, Compare};

        let mut set = RedBlackSet::with_cmp(natural().rev());
        set.insert_many(vec![1, 3, 2]);
        assert_ser_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::I32(3),
                Token::I32(2),
                Token::I32(1),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_multiset_tokens() {
        let multiset: RedBlackMultiSet<i32> = vec![2, 1, 2].into_iter().collect();
        assert_tokens(
            &multiset,
            &[
                Token::Seq { len: Some(3) },
                Token::I32(1),
                Token::I32(2),
                Token::I32(2),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_list_tokens() {
        let list: LinkedList<i32> = vec![3, 1, 2].into_iter().collect();
        assert_tokens(
            &list,
            &[
                Token::Seq { len: Some(3) },
                Token::I32(3),
                Token::I32(1),
                Token::I32(2),
                Token::SeqEnd,
            ],
        );

        let empty: LinkedList<i32> = LinkedList::new();
        assert_tokens(&empty, &[Token::Seq { len: Some(0) }, Token::SeqEnd]);
    }
}
