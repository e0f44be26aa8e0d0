use log::{debug, info, warn};
use web_sys::{window, HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::config::SubmissionTimings;
use crate::contact::controller::FormSubmissionController;
use crate::contact::dom::DomFormView;
use crate::contact::scheduler::TimeoutScheduler;

type Controller = FormSubmissionController<DomFormView, TimeoutScheduler>;

const SERVICES: &[&str] = &[
    "Overseas Placement",
    "Domestic Recruitment",
    "Resume Building",
    "Interview Preparation",
    "Visa & Documentation",
];

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_ref = use_node_ref();
    let controller = use_mut_ref(|| None::<Controller>);

    // Rendered once. After mount the controller owns the button text and
    // notification nodes inside this form.
    {
        let form_ref = form_ref.clone();
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                let document = window().and_then(|w| w.document());
                match (document, form_ref.cast::<HtmlFormElement>()) {
                    (Some(document), Some(form)) => match DomFormView::attach(document, form) {
                        Some(view) => {
                            *controller.borrow_mut() = Some(FormSubmissionController::new(
                                view,
                                TimeoutScheduler,
                                SubmissionTimings::default(),
                            ));
                            info!("Contact form ready");
                        }
                        None => warn!("Contact form has no submit button"),
                    },
                    _ => warn!("Contact form is not in the document"),
                }
                || ()
            },
            (),
        );
    }

    let onsubmit = {
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match controller.borrow().as_ref() {
                Some(controller) => {
                    controller.submit();
                    debug!(
                        "Contact form is {:?}, showing notification {:?}",
                        controller.state(),
                        controller.visible_notification()
                    );
                }
                None => warn!("Submit before the contact form was attached"),
            }
        })
    };

    html! {
        <form id="contactForm" class="contact-form" ref={form_ref} novalidate=true {onsubmit}>
            <style>
                {r#"
                    .error-message {
                        background: rgba(var(--color-error-rgb), 0.1);
                        color: var(--color-error);
                        padding: var(--space-16);
                        border-radius: var(--radius-base);
                        border: 1px solid rgba(var(--color-error-rgb), 0.2);
                        margin-bottom: var(--space-16);
                        text-align: center;
                        animation: slideIn 0.3s ease;
                    }
                    .success-message {
                        background: rgba(var(--color-success-rgb), 0.1);
                        color: var(--color-success);
                        padding: var(--space-16);
                        border-radius: var(--radius-base);
                        border: 1px solid rgba(var(--color-success-rgb), 0.2);
                        margin-bottom: var(--space-16);
                        text-align: center;
                        animation: slideIn 0.3s ease;
                    }
                    @keyframes slideIn {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .btn.loading {
                        opacity: 0.7;
                        cursor: not-allowed;
                    }
                    select.form-control {
                        cursor: pointer;
                        position: relative;
                    }
                    select.form-control:focus {
                        border-color: var(--color-primary);
                        outline: 2px solid var(--color-primary);
                        outline-offset: 2px;
                    }
                "#}
            </style>
            <div class="form-group">
                <label for="name" class="form-label">{"Full Name *"}</label>
                <input type="text" id="name" name="name" class="form-control" />
            </div>
            <div class="form-group">
                <label for="email" class="form-label">{"Email Address *"}</label>
                <input type="email" id="email" name="email" class="form-control" />
            </div>
            <div class="form-group">
                <label for="phone" class="form-label">{"Phone Number *"}</label>
                <input type="tel" id="phone" name="phone" class="form-control" />
            </div>
            <div class="form-group">
                <label for="service" class="form-label">{"Service Interested In"}</label>
                <select id="service" name="service" class="form-control">
                    <option value="">{"Select a service"}</option>
                    { for SERVICES.iter().map(|service| html! { <option value={*service}>{*service}</option> }) }
                </select>
            </div>
            <div class="form-group">
                <label for="message" class="form-label">{"Message"}</label>
                <textarea id="message" name="message" class="form-control" rows="4" />
            </div>
            <button type="submit" class="btn btn--primary btn--full-width">{"Send Message"}</button>
        </form>
    }
}
