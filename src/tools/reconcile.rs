//! Merging update records into a fetched product.
//!
//! For each sub-resource collection an incoming record either patches the
//! existing record with the same `id`, is appended as a new record when it
//! has no `id`, or is dropped when its `id` matches nothing. The merged
//! product is then saved in one call.

use crate::rest::resources::{Product, ProductImage, ProductOption, ProductVariant};
use crate::tools::args::{ImageArgs, OptionArgs, VariantArgs};
use crate::tools::request::ProductUpdate;

/// A sub-resource owned by a product.
pub trait SubResource: Default {
    /// Singular name used in logs.
    const KIND: &'static str;

    /// The record's ID, `None` if it has never been saved.
    fn id(&self) -> Option<u64>;

    /// Sets the owning product.
    fn set_product_id(&mut self, product_id: Option<u64>);
}

/// An incoming record that can be written onto a `T`.
pub trait Patch<T> {
    /// The ID of the record to patch, `None` for a new record.
    fn target_id(&self) -> Option<u64>;

    /// Copies every field present in the record onto `target`.
    fn apply_to(&self, target: &mut T);
}

/// What a reconciliation did to one collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Existing records patched.
    pub patched: usize,
    /// New records appended.
    pub appended: usize,
    /// Records whose `id` matched nothing.
    pub dropped: usize,
}

/// Merges `incoming` records into `existing`.
pub fn reconcile<T, P>(existing: &mut Vec<T>, incoming: &[P], product_id: Option<u64>) -> ReconcileReport
where
    T: SubResource,
    P: Patch<T>,
{
    let mut report = ReconcileReport::default();

    for record in incoming {
        if let Some(id) = record.target_id() {
            let mut matched = false;
            for target in existing.iter_mut().filter(|t| t.id() == Some(id)) {
                record.apply_to(target);
                matched = true;
            }
            if matched {
                report.patched += 1;
            } else {
                tracing::debug!(kind = T::KIND, id, "No existing record with this id; dropping");
                report.dropped += 1;
            }
        } else {
            let mut created = T::default();
            created.set_product_id(product_id);
            record.apply_to(&mut created);
            existing.push(created);
            report.appended += 1;
        }
    }

    report
}

/// Per-collection results of [`apply_update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Variant changes.
    pub variants: ReconcileReport,
    /// Option changes.
    pub options: ReconcileReport,
    /// Image changes.
    pub images: ReconcileReport,
}

/// Applies an update to a fetched product: scalar fields first, then each
/// sub-resource collection.
pub fn apply_update(product: &mut Product, update: &ProductUpdate) -> UpdateReport {
    update.fields.apply_to(product);
    let product_id = product.id;

    UpdateReport {
        variants: reconcile(&mut product.variants, &update.variants, product_id),
        options: reconcile(&mut product.options, &update.options, product_id),
        images: reconcile(&mut product.images, &update.images, product_id),
    }
}

impl SubResource for ProductVariant {
    const KIND: &'static str = "variant";

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn set_product_id(&mut self, product_id: Option<u64>) {
        self.product_id = product_id;
    }
}

impl SubResource for ProductOption {
    const KIND: &'static str = "option";

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn set_product_id(&mut self, product_id: Option<u64>) {
        self.product_id = product_id;
    }
}

impl SubResource for ProductImage {
    const KIND: &'static str = "image";

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn set_product_id(&mut self, product_id: Option<u64>) {
        self.product_id = product_id;
    }
}

impl Patch<ProductVariant> for VariantArgs {
    fn target_id(&self) -> Option<u64> {
        self.id
    }

    fn apply_to(&self, target: &mut ProductVariant) {
        overwrite(&mut target.price, &self.price);
        overwrite(&mut target.sku, &self.sku);
        overwrite(&mut target.inventory_quantity, &self.inventory_quantity);
        overwrite(&mut target.option1, &self.option1);
        overwrite(&mut target.option2, &self.option2);
        overwrite(&mut target.option3, &self.option3);
    }
}

impl Patch<ProductOption> for OptionArgs {
    fn target_id(&self) -> Option<u64> {
        self.id
    }

    fn apply_to(&self, target: &mut ProductOption) {
        overwrite(&mut target.name, &self.name);
        overwrite(&mut target.values, &self.values);
    }
}

impl Patch<ProductImage> for ImageArgs {
    fn target_id(&self) -> Option<u64> {
        self.id
    }

    fn apply_to(&self, target: &mut ProductImage) {
        overwrite(&mut target.src, &self.src);
        overwrite(&mut target.alt, &self.alt);
    }
}

pub(crate) fn overwrite<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if let Some(value) = value {
        *target = Some(value.clone());
    }
}
