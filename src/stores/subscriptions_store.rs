use crate::{
    types::{Parsed, SkipReason, StoreContents, SubscriptionEntry},
    youtube::get_channel_id,
};

use super::{collect, Store};

pub struct SubscriptionsStore;

pub fn parse_subscription(url: &str) -> Parsed<SubscriptionEntry> {
    match get_channel_id(url) {
        Some(channel_id) => Parsed::Entry(SubscriptionEntry { channel_id }),
        None => Parsed::Skip(SkipReason::MissingChannelMarker),
    }
}

impl Store for SubscriptionsStore {
    type Entry = SubscriptionEntry;

    fn file_name(&self) -> &'static str {
        "Subscriptions"
    }

    fn parse(&self, records: Vec<String>) -> StoreContents<SubscriptionEntry> {
        collect(records.iter().map(|url| parse_subscription(url)))
    }
}
