//! Pages built from the static service catalog, plus the home page.

use crate::application::blog::BlogService;
use crate::application::chrome::contact_view;
use crate::application::error::AppError;
use crate::domain::catalog::{SERVICES, Service, find_service, service_neighbors};
use crate::domain::error::DomainError;
use crate::presentation::views::{
    AboutView, ContactPageView, FaqView, HighlightView, HomeView, NeighborLink, ServiceCard,
    ServiceDetailView, ServicesView, StepView,
};

#[derive(Clone)]
pub struct SiteService {
    blog: BlogService,
}

impl SiteService {
    pub fn new(blog: BlogService) -> Self {
        Self { blog }
    }

    pub async fn home(&self) -> HomeView {
        HomeView {
            services: service_cards(),
            blog_teaser: self.blog.teaser().await,
        }
    }

    pub fn about(&self) -> AboutView {
        AboutView {
            services: service_cards(),
        }
    }

    pub fn contact(&self) -> ContactPageView {
        ContactPageView {
            contact: contact_view(),
        }
    }

    pub fn services(&self) -> ServicesView {
        ServicesView {
            services: service_cards(),
        }
    }

    pub fn service_detail(&self, slug: &str) -> Result<ServiceDetailView, AppError> {
        let (index, service) =
            find_service(slug).ok_or_else(|| DomainError::not_found("service"))?;
        let neighbors = service_neighbors(index);

        Ok(ServiceDetailView {
            title: service.title,
            tagline: service.tagline,
            image: service.image,
            description: service.description,
            paragraphs: service.paragraphs().collect(),
            highlights: service
                .highlights
                .iter()
                .map(|highlight| HighlightView {
                    icon: highlight.icon.as_str(),
                    title: highlight.title,
                    description: highlight.description,
                })
                .collect(),
            steps: service
                .steps
                .iter()
                .enumerate()
                .map(|(index, step)| StepView {
                    number: format!("{:02}", index + 1),
                    title: step.title,
                    description: step.description,
                })
                .collect(),
            faqs: service
                .faqs
                .iter()
                .map(|faq| FaqView {
                    question: faq.question,
                    answer: faq.answer,
                })
                .collect(),
            prev: neighbors.prev.map(neighbor_link),
            next: neighbors.next.map(neighbor_link),
        })
    }
}

fn service_cards() -> Vec<ServiceCard> {
    SERVICES
        .iter()
        .map(|service| ServiceCard {
            href: service.href(),
            title: service.title.to_string(),
            summary: service.summary.to_string(),
            image: service.image.to_string(),
        })
        .collect()
}

fn neighbor_link(service: &Service) -> NeighborLink {
    NeighborLink {
        href: service.href(),
        title: service.title.to_string(),
    }
}
