//! Static catalog of the services SpaceBox offers.
//!
//! This table is the only place service slugs are defined. Navigation,
//! the services index, detail pages and prev/next links all read from it.

use super::listing::{Neighbors, neighbors_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightIcon {
    Sparkles,
    Palette,
    Lightbulb,
}

impl HighlightIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            HighlightIcon::Sparkles => "sparkles",
            HighlightIcon::Palette => "palette",
            HighlightIcon::Lightbulb => "lightbulb",
        }
    }
}

#[derive(Debug)]
pub struct Highlight {
    pub icon: HighlightIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub tagline: &'static str,
    /// Paragraphs separated by a blank line.
    pub extended_description: &'static str,
    pub highlights: [Highlight; 3],
    pub steps: [ProcessStep; 5],
    pub faqs: [Faq; 4],
}

impl Service {
    pub fn href(&self) -> String {
        format!("/services/{}", self.slug)
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &'static str> {
        self.extended_description
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }
}

/// Look up a service by slug, returning its position in the catalog.
pub fn find_service(slug: &str) -> Option<(usize, &'static Service)> {
    SERVICES
        .iter()
        .enumerate()
        .find(|(_, service)| service.slug == slug)
}

pub fn service_neighbors(index: usize) -> Neighbors<'static, Service> {
    neighbors_at(&SERVICES, Some(index))
}

const fn highlight(icon: HighlightIcon, title: &'static str, description: &'static str) -> Highlight {
    Highlight {
        icon,
        title,
        description,
    }
}

const fn step(title: &'static str, description: &'static str) -> ProcessStep {
    ProcessStep { title, description }
}

const fn faq(question: &'static str, answer: &'static str) -> Faq {
    Faq { question, answer }
}

pub static SERVICES: [Service; 6] = [
    Service {
        slug: "residential-interior-design",
        title: "Residential Interior Design",
        image: "/static/services/consultation.jpg",
        summary: "Transforming homes into personalised, functional living spaces.",
        description: "We design homes that reflect your personality and lifestyle. From cosy bedrooms to elegant living rooms, our residential interior design service covers space planning, material selection, furniture curation, and styling, creating warm, inviting spaces that feel uniquely yours. Every detail is crafted to balance aesthetics with everyday comfort.",
        tagline: "Turning houses into homes that tell your story.",
        extended_description: "Your home is a reflection of who you are. Our residential interior design service creates living spaces that are deeply personal, beautifully crafted, and built for the way you live.\n\nFrom the initial consultation to the final styling, we handle every aspect of the work: space planning, material selection, furniture curation, and decor layering, ensuring a seamless journey from vision to reality.",
        highlights: [
            highlight(HighlightIcon::Sparkles, "Personalised Spaces", "We understand your lifestyle and design a space that's uniquely yours, with no cookie-cutter templates."),
            highlight(HighlightIcon::Palette, "Timeless Designs", "Concepts that look beautiful for years, not just a season, blending classic elegance with modern comfort."),
            highlight(HighlightIcon::Lightbulb, "Aesthetic & Functional", "Craft living spaces with both stunning design and everyday usability for families and individuals."),
        ],
        steps: [
            step("Lifestyle Assessment", "Understanding your daily routines, preferences, and functional needs to create a personalised design brief for your home."),
            step("Space Planning & Layout", "Detailed floor plans with functional zoning, optimal furniture placement, and smooth circulation for every room."),
            step("Material & Finish Selection", "Curating premium materials, textures, and finishes that align with your aesthetic vision and budget."),
            step("Furniture & Decor Curation", "Hand-picking furniture, lighting, and decor elements that bring warmth, character, and comfort to your home."),
            step("Styling & Final Touches", "Layering art, textiles, greenery, and accessories to create a polished, move-in ready living space."),
        ],
        faqs: [
            faq("What does residential interior design include?", "It covers everything from space planning, material selection, and furniture curation to styling and final move-in readiness for your home."),
            faq("Can you work with my existing furniture?", "Absolutely! We assess your existing pieces and incorporate them into the new design where they complement the vision."),
            faq("How long does a residential project take?", "Depending on scope, residential projects typically take 6-12 weeks from design to handover."),
            faq("Do you handle both apartments and villas?", "Yes, we design for all residential formats, from compact apartments to expansive villas and independent homes."),
        ],
    },
    Service {
        slug: "commercial-interior-design",
        title: "Commercial Interior Design",
        image: "/static/services/design-planning.jpg",
        summary: "Professional interiors for offices, retail & hospitality spaces.",
        description: "Our commercial design expertise transforms workplaces, retail outlets, restaurants, and hospitality venues into high-performing environments. We consider brand identity, employee well-being, customer experience, and operational efficiency to deliver interiors that elevate your business and leave lasting impressions.",
        tagline: "Professional spaces designed for performance and impression.",
        extended_description: "A well-designed commercial space drives productivity, impresses clients, and strengthens brand identity. We create environments that work as hard as you do.\n\nOur commercial design service covers offices, retail, hospitality, and healthcare, delivering spaces that balance aesthetics with operational efficiency and regulatory compliance.",
        highlights: [
            highlight(HighlightIcon::Sparkles, "Brand-Aligned Interiors", "Spaces that embody your brand identity and create memorable experiences for clients and employees."),
            highlight(HighlightIcon::Palette, "Productivity-Driven Design", "Layouts optimised for workflow efficiency, collaboration, and employee well-being."),
            highlight(HighlightIcon::Lightbulb, "Scalable Solutions", "Flexible commercial designs that grow with your business and adapt to changing needs."),
        ],
        steps: [
            step("Brand & Spatial Analysis", "Understanding your brand identity, business goals, and spatial requirements to create a tailored design strategy."),
            step("Workplace Efficiency Planning", "Designing layouts that maximise productivity, collaboration, and employee satisfaction across all zones."),
            step("Client Experience Design", "Creating reception areas, meeting rooms, and customer-facing spaces that leave lasting impressions."),
            step("Compliance & Safety Integration", "Ensuring all designs meet commercial building codes, fire safety, and accessibility requirements."),
            step("Fitout Coordination", "Managing all trades (electrical, HVAC, civil, and furnishing) for seamless commercial execution."),
        ],
        faqs: [
            faq("What types of commercial spaces do you design?", "We design offices, retail stores, restaurants, cafés, hotels, co-working spaces, and healthcare facilities."),
            faq("Can you incorporate our brand identity?", "Yes, we seamlessly integrate brand guidelines, colours, and identity into the interior design for a cohesive experience."),
            faq("Do you handle commercial compliance?", "Absolutely. All our commercial designs meet building codes, fire safety regulations, and accessibility standards."),
            faq("How do you minimise business disruption?", "We plan phased execution and off-hours work to minimise impact on your ongoing business operations."),
        ],
    },
    Service {
        slug: "space-planning-concept-development",
        title: "Space Planning & Concept Development",
        image: "/static/services/space-optimization.jpg",
        summary: "Strategic layouts, zoning & creative concept ideation.",
        description: "Great interiors begin with great planning. We develop comprehensive spatial strategies with functional zoning, traffic flow analysis, and creative concept ideation. Through mood boards, 3D visualisations, and detailed floor plans, we map every square foot to ensure your space is both beautiful and brilliantly functional.",
        tagline: "Precision planning that transforms visions into livable reality.",
        extended_description: "Great interiors begin with great planning. Our space planning and concept development service transforms your requirements into a comprehensive spatial strategy.\n\nThrough detailed floor plans, mood boards, and 3D visualisations, we map every square foot to ensure your space is both beautiful and brilliantly functional, adapting to your evolving needs.",
        highlights: [
            highlight(HighlightIcon::Sparkles, "Precision Layouts", "Every square foot is mapped for maximum utility with intuitive traffic flow and smart zoning."),
            highlight(HighlightIcon::Palette, "Creative Concepts", "Mood boards, theme development, and visual storytelling that bring your vision to life."),
            highlight(HighlightIcon::Lightbulb, "Future-Ready Plans", "Designs that adapt to your evolving needs with flexible furniture arrangements and modular elements."),
        ],
        steps: [
            step("Site Survey & Measurement", "Thorough evaluation of your existing space, including measurements, structural analysis, and design possibilities."),
            step("Functional Zoning", "Strategically dividing spaces into activity zones for work, leisure and dining, for optimal flow and usability."),
            step("Concept & Mood Board Creation", "Developing visual mood boards combining colour palettes, textures, and inspirations tailored to your vision."),
            step("3D Visualisation", "Photorealistic 3D renders and walkthroughs so you can experience and refine the design before execution."),
            step("Design Revisions & Approval", "Iterative refinement based on your feedback to ensure the final concept perfectly meets your expectations."),
        ],
        faqs: [
            faq("What is space planning?", "Space planning is the strategic arrangement of rooms, furniture, and circulation paths to maximise functionality and aesthetics."),
            faq("Do you provide 3D visualisations?", "Yes, we create photorealistic 3D renders and virtual walkthroughs so you can experience the design before execution."),
            faq("How many concept revisions are included?", "We typically include 2-3 rounds of revisions to ensure the final concept perfectly aligns with your vision."),
            faq("Can you work with unusual or challenging layouts?", "Absolutely! We specialise in creative solutions for irregular spaces, ensuring every corner is beautifully utilised."),
        ],
    },
    Service {
        slug: "material-color-consultation",
        title: "Material & Color Consultation",
        image: "/static/services/colour-schemes.jpg",
        summary: "Expert guidance on palettes, textures, finishes & materials.",
        description: "Choosing the right materials and colours is critical to achieving the desired look and feel. Our consultants combine colour psychology with hands-on material expertise to develop cohesive palettes and textures. From paint finishes and flooring to fabrics and fixtures, every selection is curated to create a harmonious, lasting interior.",
        tagline: "Colors and materials that speak your style and set the perfect mood.",
        extended_description: "Color is the soul of interior design. The right palette and materials can transform a room from ordinary to extraordinary, influencing mood, perception, and the overall feel.\n\nOur consultants combine artistic sensibility with colour psychology to develop schemes that reflect your personality. Every shade and texture is carefully selected to work harmoniously with your space.",
        highlights: [
            highlight(HighlightIcon::Sparkles, "Mood-Based Palettes", "Colors chosen based on psychology and your personal style for the perfect ambiance."),
            highlight(HighlightIcon::Palette, "Material Harmony", "Perfect pairing of textures, finishes, and colors for a cohesive visual story."),
            highlight(HighlightIcon::Lightbulb, "Trend-Proof Choices", "Palettes designed to stay elegant through changing seasons and evolving tastes."),
        ],
        steps: [
            step("Colour Psychology Consultation", "Expert guidance on how colours influence mood, productivity, and well-being within different room types."),
            step("Curated Mood Boards", "Visual mood boards combining colour palettes, textures, and inspirations tailored to your personality and space."),
            step("Material & Texture Pairing", "Coordinating complementary materials such as wood, stone and fabric with selected colour schemes for a cohesive look."),
            step("Paint & Finish Selection", "Choosing the perfect paint brands, sheens, and specialty finishes for walls, ceilings, and accents."),
            step("Physical Samples & Approval", "Providing physical swatches, paint samples, and material boards so you can see and feel the selections in your space."),
        ],
        faqs: [
            faq("How do you choose colours for a space?", "We consider room function, natural light, existing elements, your preferences, and colour psychology to create the perfect palette."),
            faq("Do you provide physical material samples?", "Yes! We provide physical swatches, paint samples, and material boards so you can see and feel the selections in your space."),
            faq("Can you match brand colours for commercial spaces?", "Yes, we seamlessly integrate brand guidelines into commercial interiors while maintaining a cohesive environment."),
            faq("How often should I update my colour scheme?", "Our schemes are designed for longevity. We recommend a soft refresh of accents and textiles every 3-5 years."),
        ],
    },
    Service {
        slug: "end-to-end-project-execution",
        title: "End-to-end Project Execution",
        image: "/static/services/project-management.jpg",
        summary: "Complete project management from concept to move-in.",
        description: "We manage your entire project from initial concept through to final handover. Our end-to-end service includes vendor coordination, timeline management, on-site supervision, budget tracking, and quality inspections at every phase. With a single point of contact and regular progress updates, we deliver a stress-free experience and move-in ready spaces.",
        tagline: "Seamless execution from concept to completion.",
        extended_description: "Flawless execution requires expert management. Our end-to-end service ensures your interior design project is delivered on time, within budget, and to the highest standards.\n\nFrom coordinating multiple vendors to managing timelines and conducting quality inspections, our dedicated project managers oversee every detail so you can enjoy a stress-free experience.",
        highlights: [
            highlight(HighlightIcon::Sparkles, "On-Time Delivery", "Strict timeline management with weekly updates to keep everything on schedule."),
            highlight(HighlightIcon::Palette, "Budget Control", "Real-time budget tracking with alerts to prevent any cost overruns."),
            highlight(HighlightIcon::Lightbulb, "Single Point of Contact", "Dedicated project manager for seamless coordination and communication."),
        ],
        steps: [
            step("Vendor & Contractor Coordination", "Managing all third-party relationships to ensure seamless execution and accountability across trades."),
            step("Timeline & Milestone Tracking", "Setting clear deadlines and tracking progress with weekly updates to keep the project on schedule."),
            step("Budget Monitoring & Reporting", "Real-time budget tracking with detailed breakdowns and alerts to prevent cost overruns."),
            step("On-Site Supervision", "Dedicated project managers present on-site to oversee quality, safety, and adherence to design plans."),
            step("Handover & Move-In Readiness", "Final inspection, snag correction, and everything placed perfectly before you step in."),
        ],
        faqs: [
            faq("What does end-to-end execution include?", "It covers vendor coordination, timeline tracking, budget monitoring, on-site supervision, quality checks, and final handover."),
            faq("How often do you provide updates?", "We provide weekly progress reports with photos, along with milestone updates and immediate alerts for any decisions needed."),
            faq("What if the project goes over budget?", "We maintain strict budget controls with real-time tracking and alerts. Any potential overruns are flagged early with alternatives."),
            faq("Can you manage renovations and new construction?", "Yes, we manage both renovation projects and fresh construction with equal expertise, coordinating all trades seamlessly."),
        ],
    },
    Service {
        slug: "quality-of-service",
        title: "Quality of Service",
        image: "/static/services/quality.jpg",
        summary: "Snag correction, decor layering & meticulous finishing.",
        description: "Quality is at the heart of everything we do. Our meticulous approach includes thorough snag correction, precise decor layering, and attention to the finest finishing details. We conduct multiple quality checks throughout the project to ensure every element meets our exacting standards and your expectations.",
        tagline: "Uncompromising quality at every stage of your project.",
        extended_description: "Quality is not just a promise, it's our standard. From the first sketch to the final handover, every phase of your project undergoes rigorous quality control to ensure flawless execution.\n\nWe partner with trusted suppliers, engage skilled craftsmen, and conduct multi-stage inspections to deliver interiors that stand the test of time.",
        highlights: [
            highlight(HighlightIcon::Sparkles, "Zero-Defect Delivery", "Multi-stage quality checks ensure every detail meets our exacting standards."),
            highlight(HighlightIcon::Palette, "Premium Materials", "Only the finest materials sourced from trusted suppliers for lasting beauty."),
            highlight(HighlightIcon::Lightbulb, "Artisan Craftsmanship", "Skilled craftsmen who bring precision and artistry to every element."),
        ],
        steps: [
            step("Multi-Stage Quality Inspections", "Rigorous checks at every construction phase, from raw materials to final finishes, ensuring zero compromises."),
            step("Snag List Management", "Systematic identification and resolution of defects or inconsistencies before final handover."),
            step("Premium Material Sourcing", "Partnering with trusted suppliers to source only the finest materials that meet our exacting standards."),
            step("Artisan Craftsmanship", "Engaging skilled craftsmen who bring precision, artistry, and attention to detail to every element."),
            step("Final Walk-Through & Sign-Off", "Comprehensive inspection with the client to ensure every detail meets expectations before project closure."),
        ],
        faqs: [
            faq("What quality standards do you follow?", "We follow strict multi-stage quality protocols with documented checklists at every phase, from material inspection to final finishing."),
            faq("How do you handle defects or issues?", "We maintain a comprehensive snag list and address every issue before handover. Post-handover, our warranty covers quality concerns."),
            faq("Do you use branded/certified materials?", "Yes, we source only from certified, reputable brands and suppliers. Every material is verified for quality and durability."),
            faq("What warranty do you provide?", "We provide a comprehensive warranty on workmanship and materials, with specifics documented in your contract."),
        ],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<&str> = SERVICES.iter().map(|service| service.slug).collect();
        assert_eq!(slugs.len(), SERVICES.len());
    }

    #[test]
    fn lookup_returns_catalog_position() {
        let (index, service) = find_service("material-color-consultation").expect("known slug");
        assert_eq!(index, 3);
        assert_eq!(service.title, "Material & Color Consultation");
        assert_eq!(service.href(), "/services/material-color-consultation");
    }

    #[test]
    fn unknown_slug_is_absent() {
        assert!(find_service("interior-consultation").is_none());
        assert!(find_service("").is_none());
    }

    #[test]
    fn neighbors_follow_catalog_order() {
        let first = service_neighbors(0);
        assert!(first.prev.is_none());
        assert_eq!(first.next.map(|s| s.slug), Some("commercial-interior-design"));

        let last = service_neighbors(SERVICES.len() - 1);
        assert_eq!(last.prev.map(|s| s.slug), Some("end-to-end-project-execution"));
        assert!(last.next.is_none());
    }

    #[test]
    fn extended_description_splits_into_paragraphs() {
        for service in &SERVICES {
            assert_eq!(service.paragraphs().count(), 2, "{}", service.slug);
        }
    }
}
