//! Built-in block renderers.
//!
//! Every block renders a fragment whose root carries `pc-block pc-{type}`,
//! escapes all text, and falls back to empty values when a field is
//! missing or mistyped. Only a non-object payload is an error.

mod contact_form;
mod content;
mod hero;
mod pricing;
mod showcase;

use crate::{ComponentType, ComponentTypeDescriptor};
use std::sync::Arc;

pub use contact_form::ContactFormBlock;
pub use content::{CtaBlock, FaqBlock, FeaturesBlock, FooterBlock, StatsBlock};
pub use hero::HeroBlock;
pub use pricing::PricingBlock;
pub use showcase::{GalleryBlock, TestimonialsBlock};

/// Descriptors for every [`ComponentType`], in picker order.
pub fn builtin_descriptors() -> Vec<ComponentTypeDescriptor> {
    ComponentType::ALL.into_iter().map(descriptor_for).collect()
}

fn descriptor_for(component_type: ComponentType) -> ComponentTypeDescriptor {
    match component_type {
        ComponentType::Hero => ComponentTypeDescriptor::new(component_type, Arc::new(HeroBlock))
            .with_name("Hero")
            .with_description("Large headline with supporting text and a call-to-action button")
            .with_category("headers")
            .with_tags(["header", "headline", "banner", "cta"])
            .with_required_fields(&["headline"])
            .with_default_content(hero::default_content()),
        ComponentType::Features => {
            ComponentTypeDescriptor::new(component_type, Arc::new(FeaturesBlock))
                .with_name("Features")
                .with_description("Grid of product features with icons")
                .with_category("content")
                .with_tags(["features", "grid", "benefits"])
                .with_required_fields(&["items"])
                .with_default_content(content::features_default())
        }
        ComponentType::Pricing => {
            ComponentTypeDescriptor::new(component_type, Arc::new(PricingBlock))
                .with_name("Pricing Table")
                .with_description("Side-by-side plans with prices and feature lists")
                .with_category("commerce")
                .with_tags(["pricing", "plans", "table", "saas"])
                .with_required_fields(&["plans"])
                .with_default_content(pricing::default_content())
        }
        ComponentType::Testimonials => {
            ComponentTypeDescriptor::new(component_type, Arc::new(TestimonialsBlock))
                .with_name("Testimonials")
                .with_description("Customer quotes with names and roles")
                .with_category("social-proof")
                .with_tags(["testimonials", "reviews", "quotes", "social proof"])
                .with_required_fields(&["items"])
                .with_default_content(showcase::testimonials_default())
        }
        ComponentType::Gallery => {
            ComponentTypeDescriptor::new(component_type, Arc::new(GalleryBlock))
                .with_name("Image Gallery")
                .with_description("Responsive grid of images with captions")
                .with_category("media")
                .with_tags(["gallery", "images", "photos", "portfolio"])
                .with_required_fields(&["images"])
                .with_default_content(showcase::gallery_default())
        }
        ComponentType::ContactForm => {
            ComponentTypeDescriptor::new(component_type, Arc::new(ContactFormBlock))
                .with_name("Contact Form")
                .with_description("Lead capture form stored in the leads dashboard")
                .with_category("forms")
                .with_tags(["form", "contact", "lead", "signup"])
                .with_required_fields(&["fields"])
                .with_default_content(contact_form::default_content())
        }
        ComponentType::Faq => ComponentTypeDescriptor::new(component_type, Arc::new(FaqBlock))
            .with_name("FAQ")
            .with_description("Expandable list of frequently asked questions")
            .with_category("content")
            .with_tags(["faq", "questions", "accordion"])
            .with_required_fields(&["items"])
            .with_default_content(content::faq_default()),
        ComponentType::Cta => ComponentTypeDescriptor::new(component_type, Arc::new(CtaBlock))
            .with_name("Call to Action")
            .with_description("Focused banner prompting a single action")
            .with_category("conversion")
            .with_tags(["cta", "banner", "button"])
            .with_required_fields(&["headline"])
            .with_default_content(content::cta_default()),
        ComponentType::Stats => ComponentTypeDescriptor::new(component_type, Arc::new(StatsBlock))
            .with_name("Stats")
            .with_description("Row of headline numbers")
            .with_category("content")
            .with_tags(["stats", "numbers", "metrics", "social proof"])
            .with_required_fields(&["items"])
            .with_default_content(content::stats_default()),
        ComponentType::Footer => {
            ComponentTypeDescriptor::new(component_type, Arc::new(FooterBlock))
                .with_name("Footer")
                .with_description("Company name, links and copyright line")
                .with_category("footers")
                .with_tags(["footer", "links", "navigation"])
                .with_default_content(content::footer_default())
        }
    }
}
