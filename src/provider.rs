// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Iteration over the items of binding providers.
//!
//! A binding configuration can be shared by items declared in several
//! providers. [`ProviderItemIterator`] visits every such item together with
//! the binding its own provider declares for it and a freshly created
//! converter.
//!
//! # Examples
//!
//! ```
//! use habtools_lib::provider::{BindingItem, BindingProvider, ConverterFactory, ProviderItemIterator};
//!
//! struct Item(String);
//!
//! impl BindingItem for Item {
//!     fn name(&self) -> &str {
//!         &self.0
//!     }
//! }
//!
//! struct Provider;
//!
//! impl BindingProvider for Provider {
//!     type Config = String;
//!     type Item = Item;
//!
//!     fn items_for(&self, config: &String) -> Vec<Item> {
//!         vec![Item(format!("{config}_switch"))]
//!     }
//!
//!     fn binding_for(&self, item_name: &str) -> Option<String> {
//!         Some(item_name.to_uppercase())
//!     }
//! }
//!
//! struct OnOff;
//!
//! impl ConverterFactory<String, Item> for OnOff {
//!     type Converter = &'static str;
//!
//!     fn create_converter(&self, _item: &Item, _config: &String) -> Option<&'static str> {
//!         Some("on_off")
//!     }
//! }
//!
//! let providers = [Provider];
//! let iterator = ProviderItemIterator::new(&providers, &OnOff);
//!
//! let mut seen = Vec::new();
//! let count = iterator.iterate(&"hall".to_string(), |binding, item, converter| {
//!     seen.push((binding.clone(), item.name().to_string(), converter));
//! });
//!
//! assert_eq!(count, 1);
//! assert_eq!(seen, vec![("HALL_SWITCH".to_string(), "hall_switch".to_string(), "on_off")]);
//! ```

/// An item that a binding provider knows by name.
pub trait BindingItem {
    /// Returns the unique item name.
    fn name(&self) -> &str;
}

/// A source of item-to-binding mappings.
pub trait BindingProvider {
    /// Binding configuration type.
    type Config;
    /// Item type.
    type Item: BindingItem;

    /// Returns the items bound with the given configuration.
    fn items_for(&self, config: &Self::Config) -> Vec<Self::Item>;

    /// Returns the binding configuration declared for an item.
    fn binding_for(&self, item_name: &str) -> Option<Self::Config>;
}

/// Creates converters for bound items.
pub trait ConverterFactory<C, I> {
    /// Converter type.
    type Converter;

    /// Returns a converter for the item, or `None` if its type is not
    /// supported.
    fn create_converter(&self, item: &I, config: &C) -> Option<Self::Converter>;
}

/// Visits every item of a set of providers that has a converter.
#[derive(Debug)]
pub struct ProviderItemIterator<'a, P, F> {
    providers: &'a [P],
    factory: &'a F,
}

impl<'a, P, F> ProviderItemIterator<'a, P, F>
where
    P: BindingProvider,
    F: ConverterFactory<P::Config, P::Item>,
{
    /// Creates an iterator over the given providers.
    #[must_use]
    pub fn new(providers: &'a [P], factory: &'a F) -> Self {
        Self { providers, factory }
    }

    /// Calls `callback` for every item bound with `config`.
    ///
    /// Providers are visited in order, and each provider's items in the order
    /// it returns them. The callback receives the binding the item's own
    /// provider declares, the item, and a new converter. Items without a
    /// binding or a converter are skipped.
    ///
    /// Returns the number of callback invocations.
    pub fn iterate<C>(&self, config: &P::Config, mut callback: C) -> usize
    where
        C: FnMut(&P::Config, &P::Item, F::Converter),
    {
        let mut visited = 0;

        for provider in self.providers {
            for item in provider.items_for(config) {
                let Some(binding) = provider.binding_for(item.name()) else {
                    tracing::trace!(item = item.name(), "Skipping item without binding");
                    continue;
                };
                let Some(converter) = self.factory.create_converter(&item, &binding) else {
                    tracing::trace!(item = item.name(), "Skipping item without converter");
                    continue;
                };

                callback(&binding, &item, converter);
                visited += 1;
            }
        }

        visited
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestItem {
        name: String,
        kind: &'static str,
    }

    impl BindingItem for TestItem {
        fn name(&self) -> &str {
            &self.name
        }
    }

    struct TestProvider {
        items: Vec<TestItem>,
        bindings: HashMap<String, u32>,
    }

    impl TestProvider {
        fn new(items: &[(&str, &'static str, Option<u32>)]) -> Self {
            Self {
                items: items
                    .iter()
                    .map(|&(name, kind, _)| TestItem {
                        name: name.to_string(),
                        kind,
                    })
                    .collect(),
                bindings: items
                    .iter()
                    .filter_map(|&(name, _, binding)| Some((name.to_string(), binding?)))
                    .collect(),
            }
        }
    }

    impl BindingProvider for TestProvider {
        type Config = u32;
        type Item = TestItem;

        fn items_for(&self, config: &u32) -> Vec<TestItem> {
            self.items
                .iter()
                .filter(|item| self.bindings.get(&item.name).is_none_or(|b| b / 10 == *config))
                .cloned()
                .collect()
        }

        fn binding_for(&self, item_name: &str) -> Option<u32> {
            self.bindings.get(item_name).copied()
        }
    }

    /// Supports switches only.
    struct SwitchFactory;

    impl ConverterFactory<u32, TestItem> for SwitchFactory {
        type Converter = String;

        fn create_converter(&self, item: &TestItem, config: &u32) -> Option<String> {
            (item.kind == "switch").then(|| format!("switch#{config}"))
        }
    }

    #[test]
    fn visits_items_of_all_providers_in_order() {
        let providers = [
            TestProvider::new(&[("a", "switch", Some(11)), ("b", "switch", Some(12))]),
            TestProvider::new(&[("c", "switch", Some(13))]),
        ];
        let iterator = ProviderItemIterator::new(&providers, &SwitchFactory);

        let mut visited = Vec::new();
        let count = iterator.iterate(&1, |binding, item, converter| {
            visited.push((*binding, item.name.clone(), converter));
        });

        assert_eq!(count, 3);
        assert_eq!(
            visited,
            vec![
                (11, "a".to_string(), "switch#11".to_string()),
                (12, "b".to_string(), "switch#12".to_string()),
                (13, "c".to_string(), "switch#13".to_string()),
            ]
        );
    }

    #[test]
    fn skips_items_without_converter() {
        let providers = [TestProvider::new(&[
            ("a", "dimmer", Some(11)),
            ("b", "switch", Some(12)),
        ])];
        let iterator = ProviderItemIterator::new(&providers, &SwitchFactory);

        let mut names = Vec::new();
        let count = iterator.iterate(&1, |_, item, _| names.push(item.name.clone()));

        assert_eq!(count, 1);
        assert_eq!(names, vec!["b".to_string()]);
    }

    #[test]
    fn skips_items_without_binding() {
        let providers = [TestProvider::new(&[("a", "switch", None), ("b", "switch", Some(12))])];
        let iterator = ProviderItemIterator::new(&providers, &SwitchFactory);

        let count = iterator.iterate(&1, |_, item, _| assert_eq!(item.name, "b"));
        assert_eq!(count, 1);
    }

    #[test]
    fn only_items_for_config_are_visited() {
        let providers = [TestProvider::new(&[
            ("a", "switch", Some(11)),
            ("b", "switch", Some(21)),
        ])];
        let iterator = ProviderItemIterator::new(&providers, &SwitchFactory);

        let count = iterator.iterate(&2, |binding, _, _| assert_eq!(*binding, 21));
        assert_eq!(count, 1);
    }

    #[test]
    fn no_providers() {
        let providers: [TestProvider; 0] = [];
        let iterator = ProviderItemIterator::new(&providers, &SwitchFactory);
        assert_eq!(iterator.iterate(&1, |_, _, _| unreachable!()), 0);
    }
}
