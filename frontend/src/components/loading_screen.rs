use yew::prelude::*;

use crate::components::logo::{LogoSize, MetallicLogo};

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="loading-screen bg-marble">
            <style>
                {r#"
                    @keyframes loadingBar {
                        0% { transform: translateX(-200%); }
                        100% { transform: translateX(400%); }
                    }
                    @keyframes fadeInScale {
                        0% { opacity: 0; transform: scale(0.95); }
                        100% { opacity: 1; transform: scale(1); }
                    }
                    .loading-logo {
                        opacity: 0;
                        animation: fadeInScale 0.8s ease-out forwards;
                    }
                    .loading-track {
                        position: relative;
                        margin-top: 3rem;
                        height: 1px;
                        width: 8rem;
                        background: #e5e7eb;
                        overflow: hidden;
                    }
                    .loading-bar {
                        position: absolute;
                        inset: 0;
                        width: 50%;
                        background: linear-gradient(to right, transparent, #4b5563, transparent);
                        transform: translateX(-100%);
                        animation: loadingBar 1.5s infinite;
                    }
                    @media (min-width: 768px) {
                        .loading-track { width: 12rem; }
                    }
                "#}
            </style>
            <div class="loading-logo">
                <MetallicLogo size={LogoSize::Md} animated={true} />
            </div>
            <div class="loading-track">
                <div class="loading-bar"></div>
            </div>
        </div>
    }
}
