// ABOUTME: Static catalog of daily tips shown on the dashboard, one per calendar day
// ABOUTME: Ids are dense from 1 and the slice is ordered by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use vira_core::models::{DailyTip, TipCategory};

/// Daily tip catalog
pub static DAILY_TIPS: [DailyTip; 40] = [
    DailyTip {
        id: 1,
        title: "Água gelada queima 30 kcal extra ao dia",
        body: "Seu corpo gasta energia para aquecer a água gelada até a temperatura corporal. Beba 2L de água gelada e queime calorias extras sem esforço!",
        action_cta: Some("Beber agora"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 2,
        title: "Treino de 4 minutos vale por 30",
        body: "O protocolo Tabata (20s intenso + 10s descanso x 8 rounds) pode ser mais eficaz que 30 minutos de cardio moderado para queima de gordura.",
        action_cta: Some("Iniciar Tabata"),
        category: TipCategory::Workout,
        image_url: None,
    },
    DailyTip {
        id: 3,
        title: "Durma no escuro total para emagrecer",
        body: "A luz durante o sono reduz a produção de melatonina, que regula o metabolismo. Use cortinas blackout ou máscara de dormir.",
        action_cta: Some("Configurar alarme"),
        category: TipCategory::Recovery,
        image_url: None,
    },
    DailyTip {
        id: 4,
        title: "Proteína no café da manhã reduz fome",
        body: "Consumir 20-30g de proteína logo ao acordar reduz a fome ao longo do dia em até 60%. Experimente ovos, whey ou iogurte grego.",
        action_cta: Some("Ver receitas"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 5,
        title: "Visualização mental queima calorias",
        body: "Estudos mostram que imaginar-se fazendo exercícios ativa os mesmos músculos e pode aumentar a força em até 13%. Mente poderosa!",
        action_cta: Some("Meditar 5 min"),
        category: TipCategory::Mindset,
        image_url: None,
    },
    DailyTip {
        id: 6,
        title: "Canela acelera o metabolismo",
        body: "1 colher de chá de canela por dia pode aumentar o metabolismo em 20x. Adicione no café, iogurte ou shake pós-treino.",
        action_cta: Some("Adicionar canela"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 7,
        title: "Músculos crescem durante o descanso",
        body: "O crescimento muscular acontece nas 48-72h após o treino. Respeite os dias de descanso - eles são tão importantes quanto o treino!",
        action_cta: Some("Planejar descanso"),
        category: TipCategory::Recovery,
        image_url: None,
    },
    DailyTip {
        id: 8,
        title: "Respiração 4-7-8 reduz cortisol",
        body: "Inspire por 4s, segure por 7s, expire por 8s. Repita 4x. Esta técnica reduz o cortisol (hormônio do estresse) que dificulta o emagrecimento.",
        action_cta: Some("Praticar agora"),
        category: TipCategory::Mindset,
        image_url: None,
    },
    DailyTip {
        id: 9,
        title: "Pimenta vermelha queima 50 kcal extra",
        body: "A capsaicina da pimenta aumenta a termogênese por até 3 horas após a refeição. Adicione pimenta nas refeições principais.",
        action_cta: Some("Temperar refeição"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 10,
        title: "Treino em jejum queima mais gordura",
        body: "Exercitar-se com estômago vazio força o corpo a usar gordura como energia. Comece com 20 minutos de caminhada leve.",
        action_cta: Some("Agendar treino"),
        category: TipCategory::Workout,
        image_url: None,
    },
    DailyTip {
        id: 11,
        title: "Chá verde antes do treino potencializa",
        body: "A cafeína + catequinas do chá verde aumentam a queima de gordura durante exercícios em até 17%. Beba 30 min antes.",
        action_cta: Some("Preparar chá"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 12,
        title: "Sorrir libera endorfina",
        body: "Mesmo um sorriso forçado libera endorfinas que reduzem o cortisol e melhoram o humor. Sorria por 60 segundos agora!",
        action_cta: Some("Sorrir agora"),
        category: TipCategory::Mindset,
        image_url: None,
    },
    DailyTip {
        id: 13,
        title: "Banho frio acelera metabolismo",
        body: "2 minutos de água fria ativam a gordura marrom, que queima calorias para gerar calor. Termine o banho com água fria.",
        action_cta: Some("Tomar banho frio"),
        category: TipCategory::Recovery,
        image_url: None,
    },
    DailyTip {
        id: 14,
        title: "Mastigar devagar reduz 20% das calorias",
        body: "Mastigar cada garfada 20-30 vezes aumenta a saciedade e reduz a ingestão calórica. Seu cérebro precisa de 20 min para sentir saciedade.",
        action_cta: Some("Praticar mastigação"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 15,
        title: "Exercício de 1 minuto vale por 45",
        body: "Burpees, mountain climbers ou jumping jacks por 1 minuto em alta intensidade equivalem a 45 minutos de caminhada moderada.",
        action_cta: Some("Fazer 1 minuto"),
        category: TipCategory::Workout,
        image_url: None,
    },
    DailyTip {
        id: 16,
        title: "Magnésio melhora o sono profundo",
        body: "400mg de magnésio 1h antes de dormir melhora a qualidade do sono. Sono ruim = mais cortisol = mais gordura abdominal.",
        action_cta: Some("Verificar magnésio"),
        category: TipCategory::Recovery,
        image_url: None,
    },
    DailyTip {
        id: 17,
        title: "Gratidão reduz compulsão alimentar",
        body: "Listar 3 coisas pelas quais você é grato reduz o estresse e a compulsão por doces. Pratique antes das refeições.",
        action_cta: Some("Listar gratidões"),
        category: TipCategory::Mindset,
        image_url: None,
    },
    DailyTip {
        id: 18,
        title: "Vinagre de maçã bloqueia carboidratos",
        body: "2 colheres de sopa antes de refeições ricas em carboidratos podem reduzir o pico de açúcar no sangue em até 34%.",
        action_cta: Some("Tomar vinagre"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 19,
        title: "Alongamento ativa recuperação",
        body: "10 minutos de alongamento após o treino aumentam o fluxo sanguíneo e aceleram a recuperação muscular em 25%.",
        action_cta: Some("Alongar agora"),
        category: TipCategory::Recovery,
        image_url: None,
    },
    DailyTip {
        id: 20,
        title: "Música aumenta performance em 15%",
        body: "Treinar com música de 120-140 BPM sincroniza o ritmo cardíaco e aumenta a resistência. Crie sua playlist motivacional!",
        action_cta: Some("Criar playlist"),
        category: TipCategory::Workout,
        image_url: None,
    },
    DailyTip {
        id: 21,
        title: "Jejum de 16h ativa autofagia",
        body: "O jejum intermitente 16:8 ativa a autofagia, processo que 'limpa' células danificadas e acelera o metabolismo.",
        action_cta: Some("Iniciar jejum"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 22,
        title: "Luz solar matinal regula hormônios",
        body: "15 minutos de sol matinal (sem óculos escuros) regulam cortisol e melatonina, melhorando sono e metabolismo.",
        action_cta: Some("Sair no sol"),
        category: TipCategory::Recovery,
        image_url: None,
    },
    DailyTip {
        id: 23,
        title: "Afirmações positivas reprogramam mente",
        body: "Repetir 'Eu sou forte e saudável' 10x ao acordar reprograma o subconsciente e melhora a aderência aos hábitos.",
        action_cta: Some("Repetir afirmação"),
        category: TipCategory::Mindset,
        image_url: None,
    },
    DailyTip {
        id: 24,
        title: "Óleo de coco aumenta saciedade",
        body: "1 colher de sopa de óleo de coco no café ou shake aumenta a saciedade por até 6 horas devido aos triglicerídeos de cadeia média.",
        action_cta: Some("Adicionar óleo coco"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 25,
        title: "Treino de força queima gordura por 48h",
        body: "Exercícios com peso criam o 'efeito afterburn' - seu corpo continua queimando calorias extras por até 48 horas após o treino.",
        action_cta: Some("Treinar força"),
        category: TipCategory::Workout,
        image_url: None,
    },
    DailyTip {
        id: 26,
        title: "Sauna seca simula exercício cardio",
        body: "20 minutos de sauna (80-100°C) equivalem a exercício moderado, aumentando frequência cardíaca e queimando calorias.",
        action_cta: Some("Usar sauna"),
        category: TipCategory::Recovery,
        image_url: None,
    },
    DailyTip {
        id: 27,
        title: "Meditação reduz cortisol em 50%",
        body: "Apenas 10 minutos de meditação diária podem reduzir o cortisol pela metade. Menos cortisol = menos gordura abdominal.",
        action_cta: Some("Meditar 10 min"),
        category: TipCategory::Mindset,
        image_url: None,
    },
    DailyTip {
        id: 28,
        title: "Fibras solúveis eliminam gordura visceral",
        body: "10g extras de fibra solúvel por dia (aveia, maçã, feijão) reduzem gordura visceral em 3,7% em 5 anos.",
        action_cta: Some("Comer mais fibras"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 29,
        title: "Escada queima 40% mais que esteira",
        body: "Subir escadas queima 40% mais calorias que caminhar na esteira na mesma velocidade. Use escadas sempre que possível!",
        action_cta: Some("Usar escadas"),
        category: TipCategory::Workout,
        image_url: None,
    },
    DailyTip {
        id: 30,
        title: "Aromaterapia reduz apetite",
        body: "Cheirar óleo essencial de hortelã-pimenta por 2 minutos reduz a fome e o desejo por doces em até 44%.",
        action_cta: Some("Cheirar hortelã"),
        category: TipCategory::Mindset,
        image_url: None,
    },
    DailyTip {
        id: 31,
        title: "Probióticos aceleram perda de peso",
        body: "Lactobacillus gasseri pode reduzir gordura abdominal em 8,5% em 12 semanas. Consuma kefir, kombucha ou suplementos.",
        action_cta: Some("Tomar probiótico"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 32,
        title: "Exercício matinal queima mais gordura",
        body: "Treinar pela manhã em jejum pode aumentar a queima de gordura em até 20% comparado ao mesmo treino à tarde.",
        action_cta: Some("Treinar de manhã"),
        category: TipCategory::Workout,
        image_url: None,
    },
    DailyTip {
        id: 33,
        title: "Respiração profunda ativa parassimpático",
        body: "Respirar profundamente por 5 minutos ativa o sistema nervoso parassimpático, reduzindo cortisol e melhorando digestão.",
        action_cta: Some("Respirar profundo"),
        category: TipCategory::Recovery,
        image_url: None,
    },
    DailyTip {
        id: 34,
        title: "Visualizar sucesso aumenta motivação",
        body: "Passar 5 minutos visualizando seu corpo ideal ativa as mesmas áreas cerebrais que a experiência real, aumentando motivação.",
        action_cta: Some("Visualizar objetivo"),
        category: TipCategory::Mindset,
        image_url: None,
    },
    DailyTip {
        id: 35,
        title: "Gengibre acelera metabolismo em 20%",
        body: "1g de gengibre em pó pode aumentar o gasto energético em 20% por 6 horas. Adicione em chás, sucos ou refeições.",
        action_cta: Some("Consumir gengibre"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 36,
        title: "HIIT de 10 minutos = 30 min cardio",
        body: "10 minutos de HIIT (alta intensidade) podem queimar tantas calorias quanto 30 minutos de cardio moderado contínuo.",
        action_cta: Some("Fazer HIIT 10min"),
        category: TipCategory::Workout,
        image_url: None,
    },
    DailyTip {
        id: 37,
        title: "Massagem com rolo acelera recuperação",
        body: "5 minutos de automassagem com rolo de espuma reduz dor muscular em 61% e acelera a recuperação.",
        action_cta: Some("Usar rolo espuma"),
        category: TipCategory::Recovery,
        image_url: None,
    },
    DailyTip {
        id: 38,
        title: "Escrever objetivos aumenta sucesso em 42%",
        body: "Pessoas que escrevem seus objetivos têm 42% mais chances de alcançá-los. Escreva sua meta de peso hoje!",
        action_cta: Some("Escrever meta"),
        category: TipCategory::Mindset,
        image_url: None,
    },
    DailyTip {
        id: 39,
        title: "Água com limão alcaliniza o corpo",
        body: "Beber água morna com limão ao acordar alcaliniza o corpo, melhora digestão e pode acelerar o metabolismo.",
        action_cta: Some("Beber água limão"),
        category: TipCategory::Nutrition,
        image_url: None,
    },
    DailyTip {
        id: 40,
        title: "Exercícios compostos queimam mais",
        body: "Agachamentos, deadlifts e flexões trabalham múltiplos grupos musculares, queimando 50% mais calorias que exercícios isolados.",
        action_cta: Some("Fazer compostos"),
        category: TipCategory::Workout,
        image_url: None,
    },
];
